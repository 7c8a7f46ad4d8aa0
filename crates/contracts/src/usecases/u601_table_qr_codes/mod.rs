//! u601: QR codes for table ordering.
//!
//! The operator enters a comma-separated list of table numbers and a base
//! ordering URL; every table gets a link `base_url + table_id` and a QR image
//! rendered by an external service.

pub mod config;
pub mod copy_marker;
pub mod print_sheet;
pub mod qr_image;

pub use config::{parse_table_numbers, TableQrConfig};
pub use copy_marker::{CopyMarker, CopyTicket, COPY_FEEDBACK_MS};
pub use print_sheet::{render_print_sheet, SheetBranding};
pub use qr_image::{download_filename, qr_image_url, QrImageSize};
