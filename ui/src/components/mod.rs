pub mod app_shell;
pub mod controls;
pub mod flow;
pub mod locale_switcher;
pub mod permission_dialog;
pub mod status_bar;
pub mod tempo_logo;
pub mod toaster;

pub use app_shell::{use_flow_config, use_shell_context, AppShell, ShellContext, Viewport};
pub use flow::{use_flow, use_screen_scope, FlowHandle, FlowHost, ScreenTimers};
pub use toaster::{use_toasts, ToastHandle};
