//! 请求 DTO 验证测试
//!
//! 字段级验证在任何数据库访问之前执行

use chrono::NaiveDate;
use finance_system::models::{
    auth::{LoginRequest, RegisterRequest},
    bank_statement::CreateBankStatementRequest,
    category::CreateCategoryRequest,
    note::CreateNoteRequest,
    transaction::{CreateTransactionRequest, UpdateTransactionRequest},
    user::UpdateUserRequest,
};
use validator::Validate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_register_rules() {
    let ok = RegisterRequest {
        name: "A".into(),
        email: "a@b.com".into(),
        password: "12345678".into(),
    };
    assert!(ok.validate().is_ok());

    // 名称必填
    assert!(RegisterRequest { name: "".into(), ..clone_register(&ok) }
        .validate()
        .is_err());
    // 邮箱格式
    assert!(RegisterRequest { email: "nope".into(), ..clone_register(&ok) }
        .validate()
        .is_err());
    // 密码至少 8 位
    assert!(RegisterRequest { password: "1234567".into(), ..clone_register(&ok) }
        .validate()
        .is_err());
}

fn clone_register(r: &RegisterRequest) -> RegisterRequest {
    RegisterRequest {
        name: r.name.clone(),
        email: r.email.clone(),
        password: r.password.clone(),
    }
}

#[test]
fn test_login_rules() {
    assert!(LoginRequest {
        email: "a@b.com".into(),
        password: "x".into()
    }
    .validate()
    .is_ok());

    assert!(LoginRequest {
        email: "bad".into(),
        password: "x".into()
    }
    .validate()
    .is_err());

    assert!(LoginRequest {
        email: "a@b.com".into(),
        password: "".into()
    }
    .validate()
    .is_err());
}

#[test]
fn test_transaction_type_must_be_income_or_expense() {
    let mut req = CreateTransactionRequest {
        category_id: 1,
        date: date(2025, 6, 1),
        description: None,
        amount: 10.0,
        transaction_type: "income".into(),
    };
    assert!(req.validate().is_ok());

    req.transaction_type = "expense".into();
    assert!(req.validate().is_ok());

    req.transaction_type = "transfer".into();
    assert!(req.validate().is_err());
}

#[test]
fn test_transaction_update_validates_optional_type() {
    let mut req = UpdateTransactionRequest {
        category_id: None,
        date: None,
        description: None,
        amount: Some(5.0),
        transaction_type: None,
    };
    assert!(req.validate().is_ok());
    assert!(!req.is_empty());

    req.transaction_type = Some("bogus".into());
    assert!(req.validate().is_err());
}

#[test]
fn test_category_type_must_be_income_or_expense() {
    let ok = CreateCategoryRequest {
        name: "Salary".into(),
        category_type: "Income".into(),
    };
    assert!(ok.validate().is_ok());

    let bad = CreateCategoryRequest {
        name: "Salary".into(),
        category_type: "income".into(), // 大小写敏感
    };
    assert!(bad.validate().is_err());
}

#[test]
fn test_note_text_required() {
    let ok = CreateNoteRequest {
        note: "pay rent".into(),
        due_date: date(2025, 7, 1),
    };
    assert!(ok.validate().is_ok());

    let empty = CreateNoteRequest {
        note: "".into(),
        due_date: date(2025, 7, 1),
    };
    assert!(empty.validate().is_err());
}

#[test]
fn test_bank_statement_rules() {
    let ok = CreateBankStatementRequest {
        entry_id: 1,
        entry_type: Some("C".into()),
        value: 250.0,
        description: Some("Paycheck".into()),
        date: chrono::Utc::now(),
    };
    assert!(ok.validate().is_ok());

    // entry_type 只接受 'C'/'D'
    let bad_type = CreateBankStatementRequest {
        entry_type: Some("CC".into()),
        ..clone_statement(&ok)
    };
    assert!(bad_type.validate().is_err());

    // 描述上限 100 字符
    let long_desc = CreateBankStatementRequest {
        description: Some("x".repeat(101)),
        ..clone_statement(&ok)
    };
    assert!(long_desc.validate().is_err());

    // entry_type 可省略
    let no_type = CreateBankStatementRequest {
        entry_type: None,
        ..clone_statement(&ok)
    };
    assert!(no_type.validate().is_ok());
}

fn clone_statement(r: &CreateBankStatementRequest) -> CreateBankStatementRequest {
    CreateBankStatementRequest {
        entry_id: r.entry_id,
        entry_type: r.entry_type.clone(),
        value: r.value,
        description: r.description.clone(),
        date: r.date,
    }
}

#[test]
fn test_user_update_image_fields_must_be_data_urls() {
    let ok = UpdateUserRequest {
        name: "Alice".into(),
        email: None,
        path_image_banner: Some("data:image/jpeg;base64,AAAA".into()),
        path_image_icon: Some("data:image/png;base64,BBBB".into()),
    };
    assert!(ok.validate().is_ok());

    let bad = UpdateUserRequest {
        name: "Alice".into(),
        email: None,
        path_image_banner: Some("https://cdn.example.com/banner.jpg".into()),
        path_image_icon: None,
    };
    assert!(bad.validate().is_err());
}
