mod capabilities;
pub use capabilities::{AGILE_PROCESS_TEMPLATE, Capabilities, SourceControl};

mod project_spec;
pub use project_spec::{ProjectSpec, Visibility};

mod project_record;
pub use project_record::ProjectRecord;

mod page;
pub use page::{Cursor, Page};

mod create_handle;
pub use create_handle::CreateHandle;
