pub mod shared {
    pub mod infrastructure {
        pub mod cloud_event;
    }
}

pub mod modules {
    pub mod quotes {
        pub mod core {
            pub mod bank_quote;
            pub mod correlation_id;
            pub mod rejection;
        }
        pub mod application {
            pub mod aggregation_service;
        }
        pub mod use_cases {
            pub mod receive_bank_quote {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_quotes_by_correlation_id {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod reset_quotes {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod quote_store;
                pub mod quote_store_in_memory;
            }
        }
    }
}

pub mod shell;
