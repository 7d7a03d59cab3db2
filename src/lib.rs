pub mod shared {
    pub mod core {
        pub mod actor;
        pub mod config;
        pub mod errors;
        pub mod pagination;
        pub mod text;
    }
    pub mod infrastructure {
        pub mod audit_log;
        pub mod day_locks;
        pub mod record_store;
    }
}

pub mod modules {
    pub mod users {
        pub mod core {
            pub mod ports;
            pub mod user;
        }
        pub mod use_cases {
            pub mod register_user {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_users {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod remove_user {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_user {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod users_in_memory;
            }
        }
    }

    pub mod holidays {
        pub mod core {
            pub mod calendar;
            pub mod holiday;
            pub mod ports;
        }
        pub mod use_cases {
            pub mod lookup_non_working_day {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod register_holiday {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod remove_holiday {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_holidays {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod holidays_in_memory;
            }
        }
    }

    pub mod time_entries {
        pub mod core {
            pub mod hours;
            pub mod overtime;
            pub mod policy;
            pub mod ports;
            pub mod time_entry;
            pub mod validation;
        }
        pub mod use_cases {
            pub mod recompute_daily_overtime {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod register_time_entry {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_time_entry {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_time_entry {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_time_entries {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod summarize_time_entries {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod time_entries_in_memory;
            }
        }
    }

    pub mod leave_requests {
        pub mod core {
            pub mod leave_request;
            pub mod ports;
        }
        pub mod use_cases {
            pub mod submit_leave_request {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod review_leave_request {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_leave_request {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_leave_requests {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod leave_requests_in_memory;
            }
        }
    }
}

pub mod shell;
