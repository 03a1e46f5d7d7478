mod alert_dialog;
pub use alert_dialog::AlertDialog;

mod login;
pub use login::LoginView;

mod home;
pub use home::HomeView;

mod patient_tracking;
pub use patient_tracking::PatientTrackingView;

mod signs;
pub use signs::SignsView;
