pub mod u601_table_qr_codes;
