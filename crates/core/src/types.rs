/// Branch and employee identifiers as issued by the upstream records service.
pub type DbId = i64;
