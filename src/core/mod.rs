//! Core-Domaenentypen: Nodes, Kanten und der Diagramm-Container.

pub mod diagram;
pub mod edge;
pub mod node;

pub use diagram::Diagram;
pub use edge::{DiagramEdge, EdgeDirection};
pub use node::DiagramNode;
