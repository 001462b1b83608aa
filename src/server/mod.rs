pub mod report_server;
