//! Chat handlers - the conversation pipeline and its side endpoints.

mod get_history;
mod send_chat_message;
mod synthesize_speech;

pub use get_history::{GetConversationHistoryHandler, GetConversationHistoryQuery};
pub use send_chat_message::{
    medicine_reply_text, ChatError, ChatReply, ChatSettings, ReplyState, SendChatMessageCommand,
    SendChatMessageHandler,
};
pub use synthesize_speech::{SpeechRequestError, SynthesizeSpeechCommand, SynthesizeSpeechHandler};
