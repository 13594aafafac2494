pub mod matchmaker;
