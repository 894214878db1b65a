//! Message entity <-> model mapper

use warbler_core::entities::Message;
use warbler_core::value_objects::{MessageId, UserId};

use crate::models::MessageModel;

/// Convert MessageModel to Message entity
impl From<MessageModel> for Message {
    fn from(model: MessageModel) -> Self {
        Message {
            id: MessageId::new(model.id),
            text: model.text,
            user_id: UserId::new(model.user_id),
            created_at: model.created_at,
        }
    }
}
