use serde_json::json;
use test_utils::builder::TestBuilder;

use crate::server::{
    data::{ConfigStore, JsonConfigStore},
    error::store::StoreError,
    model::settings::{GuildConfigMap, GuildSettings},
};
