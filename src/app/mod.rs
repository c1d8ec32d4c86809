// Application layer - Use case interactors

pub mod export_interactor;

// Re-export interactors
pub use export_interactor::ExportInteractor;
