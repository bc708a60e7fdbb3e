//! Request payloads, one struct per Bot API method, grouped by area. Each
//! implements [`crate::Payload`]; [`crate::BotApiClient`] grows a
//! convenience method per endpoint for the common required-arguments case,
//! richer calls go through `client.request(&SomePayload { .. })`.

pub mod chats;
pub mod files;
pub mod games;
pub mod messages;
pub mod payments;
pub mod queries;
pub mod updates;

pub use chats::{
    ExportChatInviteLink, GetChat, GetChatAdministrators, GetChatMember, GetChatMembersCount,
    KickChatMember, LeaveChat, PinChatMessage, PromoteChatMember, RestrictChatMember,
    SetChatDescription, SetChatTitle, UnbanChatMember, UnpinChatMessage,
};
pub use files::{GetFile, GetUserProfilePhotos};
pub use games::{
    GetGameHighScores, GetInlineGameHighScores, SendGame, SetGameScore, SetInlineGameScore,
};
pub use messages::{
    DeleteMessage, EditInlineMessageCaption, EditInlineMessageReplyMarkup, EditInlineMessageText,
    EditMessageCaption, EditMessageReplyMarkup, EditMessageText, ForwardMessage, GetMe, SendAudio,
    SendChatAction, SendContact, SendDocument, SendLocation, SendMessage, SendPhoto, SendVenue,
    SendVideo, SendVoice,
};
pub use payments::{AnswerPreCheckoutQuery, AnswerShippingQuery, SendInvoice};
pub use queries::AnswerCallbackQuery;
pub use updates::{DeleteWebhook, GetUpdates, GetWebhookInfo, SetWebhook};
