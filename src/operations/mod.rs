// Operations module
// Wire codec and the device endpoint client

pub mod client;
pub mod codec;

pub use client::{ClientError, DeviceClient, NetMessage};
pub use codec::{parse_list, serialize_list};
