//! Icons shipped with the Simplicio set.
//!
//! The set is closed, so resolving an icon is a pure mapping from variant to
//! resource path. Loading and decoding the image is left to the surface.

use std::fmt;

/// Directory the icon resources live in
pub const ICON_DIR: &str = "/simplicio";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
    Application,
    ApplicationWarning,
    Calculator,
    Calendar,
    Camera,
    Clock,
    Coffee,
    Computer,
    DirectionDown,
    DirectionLeft,
    DirectionRight,
    DirectionUp,
    Disc,
    Diskette,
    Document,
    DocumentAdd,
    DocumentDelete,
    DocumentEdit,
    DocumentSearch,
    DocumentWarning,
    File,
    FileAdd,
    FileDelete,
    FileEdit,
    FileSearch,
    FileWarning,
    Folder,
    FolderAdd,
    FolderDelete,
    FolderEmpty,
    FolderSearch,
    FolderWarning,
    Home,
    LoadDownload,
    LoadUpload,
    Mail,
    MailDelete,
    MailReceive,
    MailSearch,
    MailSend,
    MailWarning,
    MailWrite,
    Message,
    NotificationAdd,
    NotificationDone,
    NotificationError,
    NotificationRemove,
    NotificationWarning,
    Piechart,
    PlayerFastforward,
    PlayerPause,
    PlayerPlay,
    PlayerRecord,
    PlayerRewind,
    PlayerStop,
    Rss,
    Search,
    SecurityKey,
    SecurityKeyandlock,
    SecurityLock,
    SecurityUnlock,
    ShoppingcartAdd,
    ShoppingcartCheckout,
    ShoppingcartRemove,
    ShoppingcartWarning,
    StarEmpty,
    StarFull,
    StarHalf,
    User,
    UserAdd,
    UserDelete,
    UserManage,
    UserWarning,
    Volume,
    VolumeDown,
    VolumeMute,
    VolumeUp,
}

impl Icon {
    pub const ALL: [Icon; 77] = [
        Icon::Application,
        Icon::ApplicationWarning,
        Icon::Calculator,
        Icon::Calendar,
        Icon::Camera,
        Icon::Clock,
        Icon::Coffee,
        Icon::Computer,
        Icon::DirectionDown,
        Icon::DirectionLeft,
        Icon::DirectionRight,
        Icon::DirectionUp,
        Icon::Disc,
        Icon::Diskette,
        Icon::Document,
        Icon::DocumentAdd,
        Icon::DocumentDelete,
        Icon::DocumentEdit,
        Icon::DocumentSearch,
        Icon::DocumentWarning,
        Icon::File,
        Icon::FileAdd,
        Icon::FileDelete,
        Icon::FileEdit,
        Icon::FileSearch,
        Icon::FileWarning,
        Icon::Folder,
        Icon::FolderAdd,
        Icon::FolderDelete,
        Icon::FolderEmpty,
        Icon::FolderSearch,
        Icon::FolderWarning,
        Icon::Home,
        Icon::LoadDownload,
        Icon::LoadUpload,
        Icon::Mail,
        Icon::MailDelete,
        Icon::MailReceive,
        Icon::MailSearch,
        Icon::MailSend,
        Icon::MailWarning,
        Icon::MailWrite,
        Icon::Message,
        Icon::NotificationAdd,
        Icon::NotificationDone,
        Icon::NotificationError,
        Icon::NotificationRemove,
        Icon::NotificationWarning,
        Icon::Piechart,
        Icon::PlayerFastforward,
        Icon::PlayerPause,
        Icon::PlayerPlay,
        Icon::PlayerRecord,
        Icon::PlayerRewind,
        Icon::PlayerStop,
        Icon::Rss,
        Icon::Search,
        Icon::SecurityKey,
        Icon::SecurityKeyandlock,
        Icon::SecurityLock,
        Icon::SecurityUnlock,
        Icon::ShoppingcartAdd,
        Icon::ShoppingcartCheckout,
        Icon::ShoppingcartRemove,
        Icon::ShoppingcartWarning,
        Icon::StarEmpty,
        Icon::StarFull,
        Icon::StarHalf,
        Icon::User,
        Icon::UserAdd,
        Icon::UserDelete,
        Icon::UserManage,
        Icon::UserWarning,
        Icon::Volume,
        Icon::VolumeDown,
        Icon::VolumeMute,
        Icon::VolumeUp,
    ];

    /// Resource name, e.g. `document_add`
    pub fn name(self) -> &'static str {
        match self {
            Icon::Application => "application",
            Icon::ApplicationWarning => "application_warning",
            Icon::Calculator => "calculator",
            Icon::Calendar => "calendar",
            Icon::Camera => "camera",
            Icon::Clock => "clock",
            Icon::Coffee => "coffee",
            Icon::Computer => "computer",
            Icon::DirectionDown => "direction_down",
            Icon::DirectionLeft => "direction_left",
            Icon::DirectionRight => "direction_right",
            Icon::DirectionUp => "direction_up",
            Icon::Disc => "disc",
            Icon::Diskette => "diskette",
            Icon::Document => "document",
            Icon::DocumentAdd => "document_add",
            Icon::DocumentDelete => "document_delete",
            Icon::DocumentEdit => "document_edit",
            Icon::DocumentSearch => "document_search",
            Icon::DocumentWarning => "document_warning",
            Icon::File => "file",
            Icon::FileAdd => "file_add",
            Icon::FileDelete => "file_delete",
            Icon::FileEdit => "file_edit",
            Icon::FileSearch => "file_search",
            Icon::FileWarning => "file_warning",
            Icon::Folder => "folder",
            Icon::FolderAdd => "folder_add",
            Icon::FolderDelete => "folder_delete",
            Icon::FolderEmpty => "folder_empty",
            Icon::FolderSearch => "folder_search",
            Icon::FolderWarning => "folder_warning",
            Icon::Home => "home",
            Icon::LoadDownload => "load_download",
            Icon::LoadUpload => "load_upload",
            Icon::Mail => "mail",
            Icon::MailDelete => "mail_delete",
            Icon::MailReceive => "mail_receive",
            Icon::MailSearch => "mail_search",
            Icon::MailSend => "mail_send",
            Icon::MailWarning => "mail_warning",
            Icon::MailWrite => "mail_write",
            Icon::Message => "message",
            Icon::NotificationAdd => "notification_add",
            Icon::NotificationDone => "notification_done",
            Icon::NotificationError => "notification_error",
            Icon::NotificationRemove => "notification_remove",
            Icon::NotificationWarning => "notification_warning",
            Icon::Piechart => "piechart",
            Icon::PlayerFastforward => "player_fastforward",
            Icon::PlayerPause => "player_pause",
            Icon::PlayerPlay => "player_play",
            Icon::PlayerRecord => "player_record",
            Icon::PlayerRewind => "player_rewind",
            Icon::PlayerStop => "player_stop",
            Icon::Rss => "rss",
            Icon::Search => "search",
            Icon::SecurityKey => "security_key",
            Icon::SecurityKeyandlock => "security_keyandlock",
            Icon::SecurityLock => "security_lock",
            Icon::SecurityUnlock => "security_unlock",
            Icon::ShoppingcartAdd => "shoppingcart_add",
            Icon::ShoppingcartCheckout => "shoppingcart_checkout",
            Icon::ShoppingcartRemove => "shoppingcart_remove",
            Icon::ShoppingcartWarning => "shoppingcart_warning",
            Icon::StarEmpty => "star_empty",
            Icon::StarFull => "star_full",
            Icon::StarHalf => "star_half",
            Icon::User => "user",
            Icon::UserAdd => "user_add",
            Icon::UserDelete => "user_delete",
            Icon::UserManage => "user_manage",
            Icon::UserWarning => "user_warning",
            Icon::Volume => "volume",
            Icon::VolumeDown => "volume_down",
            Icon::VolumeMute => "volume_mute",
            Icon::VolumeUp => "volume_up",
        }
    }

    /// Path of the PNG resource for this icon
    pub fn resource_path(self) -> String {
        format!("{}/{}.png", ICON_DIR, self.name())
    }

    /// Look an icon up by its resource name
    pub fn from_name(name: &str) -> Option<Icon> {
        Self::ALL.iter().copied().find(|icon| icon.name() == name)
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
