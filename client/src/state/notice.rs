//! User-visible notices shown in place of browser alerts.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

pub const SAVE_FAILED: &str =
    "保存に失敗しました。ブラウザのストレージ容量がいっぱいか、設定が無効になっている可能性があります。";
pub const NO_SAVED_DATA: &str = "保存されたデータがありません。";
pub const RESTORED: &str = "保存された内容を復元しました。";
pub const RESTORE_FAILED: &str = "データの復元に失敗しました。";
pub const NO_REPORT_DATA: &str = "表示するデータがありません。先にタイムラインを作成してください。";
pub const REPORT_FAILED: &str = "保存されたデータを読み込めませんでした。もう一度保存してください。";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A message banner. Provided app-wide as `RwSignal<Option<Notice>>` so it
/// survives a route change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn info(message: &str) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.to_owned(),
        }
    }

    pub fn error(message: &str) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.to_owned(),
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self.kind {
            NoticeKind::Info => "notice notice--info",
            NoticeKind::Error => "notice notice--error",
        }
    }
}
