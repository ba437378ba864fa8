pub mod ops_publish;
