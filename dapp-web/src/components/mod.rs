pub mod account_select;
pub mod balance_alert;
pub mod contract_panel;
pub mod navbar;
pub mod network_select;
pub mod toaster;
pub mod wallet_connect;

pub use account_select::AccountSelect;
pub use balance_alert::BalanceInsufficientAlert;
pub use contract_panel::GreeterPanel;
pub use navbar::Navbar;
pub use network_select::NetworkSelect;
pub use toaster::ToastViewport;
pub use wallet_connect::WalletConnect;
