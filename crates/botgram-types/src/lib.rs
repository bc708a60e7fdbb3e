//! # botgram-types
//!
//! Data types for the Telegram Bot API: flat serde DTOs mirroring the wire
//! schema field-for-field, plus the response envelope and the input-file
//! union used for uploads. No HTTP here; see `botgram-client` for dispatch.

pub mod chat;
pub mod chat_id;
pub mod games;
pub mod input_file;
pub mod media;
pub mod message;
pub mod payments;
pub mod reply_markup;
pub mod response;
pub mod update;
pub mod user;

pub use chat::{Chat, ChatAction, ChatMember, ChatMemberStatus, ChatType};
pub use chat_id::ChatId;
pub use games::{Animation, CallbackGame, Game, GameHighScore};
pub use input_file::InputFile;
pub use media::{
    Audio, Contact, Document, File, Location, PhotoSize, Sticker, Venue, Video, VideoNote, Voice,
};
pub use message::{Message, MessageEntity, MessageEntityType, MessageKind, ParseMode};
pub use payments::{
    Invoice, LabeledPrice, OrderInfo, PreCheckoutQuery, ShippingAddress, ShippingOption,
    ShippingQuery, SuccessfulPayment,
};
pub use reply_markup::{
    ForceReply, InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, ReplyKeyboardMarkup,
    ReplyKeyboardRemove, ReplyMarkup,
};
pub use response::{ApiResponse, ResponseParameters};
pub use update::{AllowedUpdate, CallbackQuery, Update, UpdateKind, WebhookInfo};
pub use user::{User, UserProfilePhotos};
