use history_store::{build_history_csv, export_filename, StoredRecord};
use pretty_assertions::assert_eq;

#[test]
fn quotes_are_doubled_and_details_included() {
    let records = vec![
        StoredRecord::new("say \"hi\"", "QR_CODE", 0).with_details("shop, aisle 3"),
        StoredRecord::new("4006381333931", "EAN_13", 1_000),
    ];

    let csv = build_history_csv(&records);

    assert_eq!(
        csv,
        concat!(
            "\"say \"\"hi\"\"\",\"QR_CODE\",\"0\",\"1970-01-01 00:00:00\",\"shop, aisle 3\"\r\n",
            "\"4006381333931\",\"EAN_13\",\"1000\",\"1970-01-01 00:00:01\",\"\"\r\n",
        )
    );
}

#[test]
fn empty_history_renders_empty_csv() {
    assert_eq!(build_history_csv(&[]), "");
}

#[test]
fn export_filename_embeds_timestamp() {
    assert_eq!(export_filename(1_700_000_000_000), "history-1700000000000.csv");
}
