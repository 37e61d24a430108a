pub mod transaction_testkit;
