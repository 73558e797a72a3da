//! 数据访问层：每个实体一个仓储，全部使用共享连接池

pub mod bank_statement_repo;
pub mod category_repo;
pub mod fixed_account_repo;
pub mod investment_repo;
pub mod note_repo;
pub mod transaction_repo;
pub mod user_repo;

pub use bank_statement_repo::BankStatementRepository;
pub use category_repo::CategoryRepository;
pub use fixed_account_repo::FixedAccountRepository;
pub use investment_repo::InvestmentRepository;
pub use note_repo::NoteRepository;
pub use transaction_repo::TransactionRepository;
pub use user_repo::UserRepository;
