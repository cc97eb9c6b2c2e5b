//! Presentation outputs: the text report and the network diagram.

mod diagram;
mod report;

pub use diagram::{BusOverlay, Diagram, DiagramEdge, RenderError};
pub use report::{Report, ReportRequest};
