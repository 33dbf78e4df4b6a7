use document::team::{Player, Team};
use mongodb::{bson::oid::ObjectId, error::Error};
use test_utils::{context::TestContext, factory};

use crate::data::team::TeamRepository;

mod create;
mod delete;
mod find_all;
mod push_player;
