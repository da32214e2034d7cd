// Live clock and id generation for the running application.

use crate::core::ports::{Clock, IdSource};
use uuid::Uuid;

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }
}

pub struct UuidIds;

impl IdSource for UuidIds {
    fn next_id(&self) -> Uuid {
        Uuid::now_v7()
    }
}
