/// Hosted service that renders arbitrary text as a QR PNG.
pub const QR_SERVICE_ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/";

/// Square image sizes requested from the QR service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QrImageSize {
    /// Cards on the admin page
    Grid,
    /// Printed sheet
    Print,
    /// Single-table download
    Download,
}

impl QrImageSize {
    pub fn pixels(self) -> u32 {
        match self {
            QrImageSize::Grid => 150,
            QrImageSize::Print => 200,
            QrImageSize::Download => 300,
        }
    }
}

/// URL of the QR image encoding `data`.
///
/// `data` is percent-encoded here and nowhere else.
pub fn qr_image_url(data: &str, size: QrImageSize) -> String {
    let px = size.pixels();
    format!(
        "{}?size={}x{}&data={}",
        QR_SERVICE_ENDPOINT,
        px,
        px,
        urlencoding::encode(data)
    )
}

/// Suggested file name for a downloaded QR image.
pub fn download_filename(table_id: &str) -> String {
    format!("table-{}-qr.png", table_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_url() {
        assert_eq!(
            qr_image_url("http://x/?t=5", QrImageSize::Grid),
            "https://api.qrserver.com/v1/create-qr-code/?size=150x150&data=http%3A%2F%2Fx%2F%3Ft%3D5"
        );
    }

    #[test]
    fn test_download_url_and_filename() {
        let url = qr_image_url("http://x/?t=7", QrImageSize::Download);
        assert!(url.starts_with("https://api.qrserver.com/v1/create-qr-code/?size=300x300&data="));
        assert!(url.ends_with("t%3D7"));
        assert_eq!(download_filename("7"), "table-7-qr.png");
    }

    #[test]
    fn test_data_with_ampersand_stays_inside_parameter() {
        let url = qr_image_url("http://h/menu?qr=true&table=1", QrImageSize::Print);
        assert_eq!(url.matches('&').count(), 1);
        assert!(url.contains("size=200x200"));
        assert!(url.ends_with("qr%3Dtrue%26table%3D1"));
    }
}
