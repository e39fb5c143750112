use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;

include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

pub fn about() -> Message {
    Message::About {
        name: APP_METADATA_NAME.to_string(),
        version: APP_METADATA_VERSION.to_string(),
        description: APP_METADATA_DESCRIPTION.to_string(),
    }
}

pub fn cmd() -> Result<()> {
    msg_print!(about(), true);
    Ok(())
}
