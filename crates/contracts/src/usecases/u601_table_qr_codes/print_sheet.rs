//! HTML document for printing every table's QR code on one sheet.

use super::config::TableQrConfig;
use super::qr_image::{qr_image_url, QrImageSize};

/// Restaurant name and accent colour used on the printed sheet.
///
/// Inserted into the document verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetBranding {
    pub restaurant_name: String,
    pub accent_color: String,
}

impl Default for SheetBranding {
    fn default() -> Self {
        Self {
            restaurant_name: "Mian Taste".to_string(),
            accent_color: "#46923c".to_string(),
        }
    }
}

impl SheetBranding {
    pub fn document_title(&self) -> String {
        format!("Table QR Codes - {}", self.restaurant_name)
    }
}

/// Self-contained HTML page with one QR block per table, in input order.
///
/// Table ids come straight from operator input, so they are escaped before
/// being placed into text or attributes. The image URL is already
/// percent-encoded and goes in as is.
pub fn render_print_sheet(config: &TableQrConfig, branding: &SheetBranding) -> String {
    let title = branding.document_title();
    let name = &branding.restaurant_name;
    let accent = &branding.accent_color;

    let blocks: String = config
        .table_ids()
        .iter()
        .map(|table_id| {
            let src = qr_image_url(&config.ordering_url(table_id), QrImageSize::Print);
            render_block(&ammonia::clean_text(table_id), &src, accent)
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8">
    <title>{title}</title>
    <style>
      body {{ font-family: Arial, sans-serif; padding: 20px; }}
      @media print {{
        @page {{ margin: 1cm; }}
        body {{ margin: 0; }}
      }}
    </style>
  </head>
  <body>
    <h1 style="text-align: center; color: {accent}; margin-bottom: 30px;">{name} - Table QR Codes</h1>
{blocks}  </body>
</html>
"#
    )
}

fn render_block(table_id: &str, src: &str, accent: &str) -> String {
    format!(
        r#"    <div style="display: inline-block; margin: 20px; text-align: center; page-break-inside: avoid;">
      <h3 style="margin-bottom: 10px; font-family: Arial;">Table {table_id}</h3>
      <img src="{src}" alt="QR Code for Table {table_id}" style="border: 2px solid {accent};">
      <p style="margin-top: 10px; font-size: 12px; color: #666; font-family: Arial;">Scan to order from Table {table_id}</p>
    </div>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet(tables: &str) -> String {
        let config = TableQrConfig::new(tables, "http://x/?t=");
        render_print_sheet(&config, &SheetBranding::default())
    }

    #[test]
    fn test_one_block_per_table_in_order() {
        let html = sheet("1,2");
        assert_eq!(html.matches("<img ").count(), 2);

        let first = html.find(">Table 1</h3>").unwrap();
        let second = html.find(">Table 2</h3>").unwrap();
        assert!(first < second);

        assert!(html.contains(r#"alt="QR Code for Table 1""#));
        assert!(html.contains("Scan to order from Table 2"));
        assert_eq!(html.matches("page-break-inside: avoid").count(), 2);
    }

    #[test]
    fn test_images_use_print_size() {
        let html = sheet("5");
        let expected = qr_image_url("http://x/?t=5", QrImageSize::Print);
        assert!(html.contains(&format!(r#"src="{}""#, expected)));
        assert!(!html.contains("size=150x150"));
    }

    #[test]
    fn test_branding() {
        let html = sheet("1");
        assert!(html.contains("<title>Table QR Codes - Mian Taste</title>"));
        assert!(html.contains("Mian Taste - Table QR Codes</h1>"));
        assert!(html.contains("border: 2px solid #46923c;"));
    }

    #[test]
    fn test_empty_table_list_renders_heading_only() {
        let html = sheet(" , ");
        assert_eq!(html.matches("<img ").count(), 0);
        assert!(html.contains("<h1 "));
    }

    #[test]
    fn test_table_id_is_escaped() {
        let html = sheet(r#"<b>"x"</b>"#);
        assert!(!html.contains("<b>"));
        assert_eq!(html.matches("<img ").count(), 1);
    }
}
