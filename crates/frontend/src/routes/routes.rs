use crate::usecases::u601_table_qr_codes::TableQrCodesView;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

/// Путь страницы QR-кодов в админке
pub const TABLE_QR_CODES_PATH: &str = "/admin/qr-codes";

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <main class="app-main">
                <Routes fallback=|| view! { <Redirect path=TABLE_QR_CODES_PATH /> }>
                    <Route path=path!("/admin/qr-codes") view=TableQrCodesView />
                </Routes>
            </main>
        </Router>
    }
}
