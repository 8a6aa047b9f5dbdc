pub mod publish;
pub mod render;

pub use publish::{ChartError, ChartPublisher, PublishedChart};
pub use render::{render_bar_chart, render_pie_chart};

/// The two charts derived from a catalog snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Pie,
}

impl ChartKind {
    /// File name under the static directory.
    pub fn file_name(self) -> &'static str {
        match self {
            ChartKind::Bar => "bar_chart.png",
            ChartKind::Pie => "pie_chart.png",
        }
    }

    pub fn template(self) -> &'static str {
        match self {
            ChartKind::Bar => "bar_chart",
            ChartKind::Pie => "pie_chart",
        }
    }
}
