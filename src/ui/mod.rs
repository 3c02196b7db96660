pub mod adapter;
pub mod connectivity;
pub mod session;
pub mod state;
pub mod viewer;

pub use adapter::{BookAdapter, EmptyState, Row};
pub use connectivity::{AssumeOnline, Connectivity, TcpProbe};
pub use session::{Completion, Generation, SearchSession};
pub use state::SavedState;
pub use viewer::{SystemViewer, UrlViewer};
