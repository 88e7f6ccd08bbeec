//! User-facing message table.

use crate::prefs::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    FinishAndSeal,
    SetSealDuration,
    Hours,
    Min,
    Sec,
    Back,
    Seal,
    BeginFlow,
    KeepMoving,
    VaultTitle,
    EmptyVault,
    EncryptedCapsule,
    UnlockedThought,
    Words,
    Cancel,
    SaveChanges,
    DontLookBack,
    EntrySealed,
    ThoughtRefined,
    Refine,
    Refining,
    Original,
    Polished,
    UsePolished,
    RefineError,
    NothingToSeal,
    SealFailed,
}

/// Translate `key` into `language`.
pub fn t(language: Language, key: MessageKey) -> &'static str {
    match language {
        Language::En => english(key),
        Language::Zh => chinese(key),
    }
}

fn english(key: MessageKey) -> &'static str {
    use MessageKey::*;
    match key {
        FinishAndSeal => "Finish & Seal",
        SetSealDuration => "Set Seal Duration",
        Hours => "Hours",
        Min => "Min",
        Sec => "Sec",
        Back => "Back",
        Seal => "Seal",
        BeginFlow => "Begin your flow...",
        KeepMoving => "Keep Moving",
        VaultTitle => "The Vault",
        EmptyVault => "Your repository is currently empty.",
        EncryptedCapsule => "Encrypted Time Capsule",
        UnlockedThought => "Unlocked Thought",
        Words => "words",
        Cancel => "Cancel",
        SaveChanges => "Save Changes",
        DontLookBack => "Don't look back, keep flowing.",
        EntrySealed => "Entry sealed.",
        ThoughtRefined => "Thought refined and saved.",
        Refine => "Refine typos",
        Refining => "Refining...",
        Original => "Original",
        Polished => "Polished Version",
        UsePolished => "Apply Refinement",
        RefineError => "Refinement failed. Please try again.",
        NothingToSeal => "Write something first.",
        SealFailed => "Could not save. Your draft is still here.",
    }
}

fn chinese(key: MessageKey) -> &'static str {
    use MessageKey::*;
    match key {
        FinishAndSeal => "完成并封存",
        SetSealDuration => "设定封存时长",
        Hours => "小时",
        Min => "分钟",
        Sec => "秒钟",
        Back => "返回",
        Seal => "封存",
        BeginFlow => "开始你的心流...",
        KeepMoving => "继续写，不要停",
        VaultTitle => "封存库",
        EmptyVault => "库中目前空空如也。",
        EncryptedCapsule => "加密的时间胶囊",
        UnlockedThought => "已解锁的灵感",
        Words => "字",
        Cancel => "取消",
        SaveChanges => "保存修改",
        DontLookBack => "不要回头，保持心流。",
        EntrySealed => "灵感已封存。",
        ThoughtRefined => "灵感已优化并保存。",
        Refine => "修正错字",
        Refining => "正在修正...",
        Original => "原始版",
        Polished => "修正版",
        UsePolished => "应用修正",
        RefineError => "修正失败，请重试。",
        NothingToSeal => "先写点什么吧。",
        SealFailed => "保存失败，草稿仍在。",
    }
}

/// "Unlocked Thought (N words)" label for an entry list row.
pub fn unlocked_label(language: Language, words: usize) -> String {
    format!(
        "{} ({} {})",
        t(language, MessageKey::UnlockedThought),
        words,
        t(language, MessageKey::Words)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_both_languages() {
        assert_eq!(t(Language::En, MessageKey::EntrySealed), "Entry sealed.");
        assert_eq!(t(Language::Zh, MessageKey::EntrySealed), "灵感已封存。");
    }

    #[test]
    fn test_unlocked_label() {
        assert_eq!(unlocked_label(Language::En, 3), "Unlocked Thought (3 words)");
        assert_eq!(unlocked_label(Language::Zh, 3), "已解锁的灵感 (3 字)");
    }
}
