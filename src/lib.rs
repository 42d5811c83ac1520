pub mod shared {
    pub mod core {
        pub mod errors;
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod database {
            pub mod in_memory;
        }
        pub mod http_response;
    }
}

pub mod modules {
    pub mod users {
        pub mod core {
            pub mod user;
        }
        pub mod use_cases {
            pub mod register_user {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod users;
            }
        }
    }
    pub mod projects {
        pub mod core {
            pub mod project;
        }
        pub mod use_cases {
            pub mod create_project {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_projects {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod projects;
            }
        }
    }
    pub mod work_logs {
        pub mod core {
            pub mod work_log;
            pub mod work_log_record;
        }
        pub mod use_cases {
            pub mod log_work {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod work_logs;
            }
        }
    }
    pub mod reports {
        pub mod core {
            pub mod aggregate;
            pub mod report;
        }
        pub mod use_cases {
            pub mod generate_report {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod get_report {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod reports;
            }
        }
    }
    pub mod integrations {
        pub mod core {
            pub mod integration;
        }
        pub mod use_cases {
            pub mod connect_tracker {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod disconnect_tracker {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod tracker_status {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod sync_tracker {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod integrations;
            }
        }
    }
}

pub mod shell;
