use document::composer::Composer;
use mongodb::{bson::oid::ObjectId, error::Error};
use test_utils::{context::TestContext, factory};

use crate::{data::composer::ComposerRepository, domain::composer::UpdateComposerParams};

mod create;
mod delete;
mod find_all;
mod find_by_id;
mod update;
