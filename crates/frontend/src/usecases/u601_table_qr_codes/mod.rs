mod table_card;
mod view;

pub use table_card::TableQrCard;
pub use view::TableQrCodesView;
