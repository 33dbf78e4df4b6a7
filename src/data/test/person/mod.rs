use document::person::{Dependent, Person, Role};
use mongodb::error::Error;
use test_utils::{context::TestContext, factory};

use crate::data::person::PersonRepository;

mod create;
mod find_all;
