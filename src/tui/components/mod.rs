//! UI components for the article review TUI.
//!
//! Components are stateless renderers following the bubbletea-rs
//! Model-View pattern: the application owns the state and passes a view
//! context into each component.

mod article_detail;
mod feedback_panel;
pub mod rubric;
mod text_wrap;

pub use article_detail::{ArticleDetailComponent, ArticleDetailViewContext};
pub use feedback_panel::{FeedbackPanelComponent, FeedbackPanelViewContext};
pub use text_wrap::wrap_text;
