pub mod compile_time {
    pub mod lexical {
        /// Maximum request length in bytes
        /// SECURITY: bounds work done for a single request string
        pub const MAX_REQUEST_LENGTH: usize = 4_096;

        /// Maximum number of words in a request
        /// SECURITY: bounds token allocation per request
        pub const MAX_WORD_COUNT: usize = 256;
    }

    pub mod syntax {
        /// Minimum word count for a complete request
        /// ("draw a <shape>" plus one five-word measurement clause)
        pub const MIN_REQUEST_WORDS: usize = 8;

        /// Exact word count of one measurement clause
        pub const CLAUSE_WORD_COUNT: usize = 5;
    }

    pub mod shapes {
        /// Smallest supported regular-polygon side count
        pub const MIN_POLYGON_SIDES: i32 = 5;

        /// Largest supported regular-polygon side count
        pub const MAX_POLYGON_SIDES: i32 = 8;

        /// Fallback canvas bound when no runtime setting is provided.
        /// The polygon origin is placed at half this value so vertices
        /// computed around the origin stay non-negative.
        pub const DEFAULT_MAX_CANVAS_SIZE: i32 = 1_000;
    }

    pub mod logging {
        /// Maximum events retained by the in-memory logger
        /// RESOURCE: prevents unbounded growth in long-lived processes
        pub const LOG_BUFFER_SIZE: usize = 10_000;

        /// Maximum log message length
        /// RESOURCE: prevents memory attacks via huge messages
        pub const MAX_LOG_MESSAGE_LENGTH: usize = 10_000;
    }
}
