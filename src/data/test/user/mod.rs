use document::user::User;
use mongodb::error::Error;
use test_utils::{context::TestContext, factory};

use crate::{
    data::user::{is_duplicate_key, UserRepository},
    startup,
};

mod create;
mod find_by_user_name;
