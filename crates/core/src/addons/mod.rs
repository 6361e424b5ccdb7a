//! Installation and print add-on costs.

pub mod installation;
pub mod print;
pub mod types;

pub use installation::{
    InstallationPrice, InstallationPriceLookup, InstallationPriceTable, installation_cost,
};
pub use print::{PanelDimensions, billboard_print_cost, print_cost};
pub use types::{AddOnConfig, BillboardPrintCost, InstallationCost, PrintCost, SizeInstallation};
