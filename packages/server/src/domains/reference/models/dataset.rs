/// The fixed reference CSV files shipped with the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceDataset {
    GilsonPipettes,
    GamingMice,
    GamingLaptops,
}

impl ReferenceDataset {
    pub const ALL: [ReferenceDataset; 3] = [
        ReferenceDataset::GilsonPipettes,
        ReferenceDataset::GamingMice,
        ReferenceDataset::GamingLaptops,
    ];

    /// File name inside the reference directory.
    pub fn file_name(self) -> &'static str {
        match self {
            ReferenceDataset::GilsonPipettes => "GilsonPipettes.csv",
            ReferenceDataset::GamingMice => "GamingMouseList.csv",
            ReferenceDataset::GamingLaptops => "GamingLaptopsList.csv",
        }
    }

    /// File name offered to the browser on export.
    pub fn download_name(self) -> &'static str {
        match self {
            ReferenceDataset::GilsonPipettes => "gilson_pipettes.csv",
            ReferenceDataset::GamingMice => "gaming_mouse_list.csv",
            ReferenceDataset::GamingLaptops => "gaming_laptop_list.csv",
        }
    }

    /// Route of the table page.
    pub fn page_route(self) -> &'static str {
        match self {
            ReferenceDataset::GilsonPipettes => "/gilson",
            ReferenceDataset::GamingMice => "/gaming_mouse",
            ReferenceDataset::GamingLaptops => "/gaming_laptop",
        }
    }

    /// Route of the CSV download.
    pub fn export_route(self) -> &'static str {
        match self {
            ReferenceDataset::GilsonPipettes => "/export_gilson_csv",
            ReferenceDataset::GamingMice => "/export_mouse_csv",
            ReferenceDataset::GamingLaptops => "/export_laptop_csv",
        }
    }

    pub fn template(self) -> &'static str {
        match self {
            ReferenceDataset::GilsonPipettes => "gilson",
            ReferenceDataset::GamingMice => "gaming_mouse",
            ReferenceDataset::GamingLaptops => "gaming_laptop",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ReferenceDataset::GilsonPipettes => "Gilson Pipettes",
            ReferenceDataset::GamingMice => "Gaming Mice",
            ReferenceDataset::GamingLaptops => "Gaming Laptops",
        }
    }
}
