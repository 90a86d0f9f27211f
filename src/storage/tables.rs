use redb::TableDefinition;

/// Resume records: insertion sequence -> Resume (msgpack)
pub const RESUMES: TableDefinition<u64, &[u8]> = TableDefinition::new("resumes");

/// Developer applications: insertion sequence -> DeveloperApplication (msgpack)
pub const DEVELOPER_APPLICATIONS: TableDefinition<u64, &[u8]> =
    TableDefinition::new("developer_applications");

/// AI queries: insertion sequence -> AiQuery (msgpack)
pub const AI_QUERIES: TableDefinition<u64, &[u8]> = TableDefinition::new("ai_queries");

/// Queue number index: queue number -> application uuid (uniqueness guard)
pub const QUEUE_NUMBERS: TableDefinition<&str, &str> = TableDefinition::new("queue_numbers");

/// User records: uuid -> User (msgpack)
pub const USERS: TableDefinition<&str, &[u8]> = TableDefinition::new("users");

/// Username index: username -> uuid
pub const USERNAMES: TableDefinition<&str, &str> = TableDefinition::new("usernames");

/// Per-table counters: table name -> last allocated sequence
pub const SEQUENCES: TableDefinition<&str, u64> = TableDefinition::new("sequences");
