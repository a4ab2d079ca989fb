mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod flash;
pub use flash::FlashBanner;

mod records;
pub use records::{Pagination, RecordTable, SearchBox};

mod login;
pub use login::LoginView;

mod submission;
pub use submission::SubmissionWizard;

mod listings;
pub use listings::{AllSubmissionsView, AuthorizedRecordsView, MySubmissionsView};

mod users;
pub use users::UserManagementView;

mod shell;
pub use shell::AppShell;
