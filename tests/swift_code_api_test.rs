// ==========================================
// SwiftCodeApi 集成测试
// ==========================================
// 测试目标: 按代码/按国家查询、单条创建与删除的对外语义
// ==========================================


use swift_code_registry::api::{ApiError, CreateSwiftCodeRequest, DeleteSwiftCodeRequest};
use swift_code_registry::domain::HeadquartersPolicy;
use swift_code_registry::importer::SwiftCodeImporter;
use swift_code_registry::logging;
use swift_code_registry::repository::SwiftCodeRepository;
use test_helpers::{create_api, create_importer, create_repo, create_test_db, fixture, record};

fn create_request(swift_code: &str, is_headquarter: Option<bool>) -> CreateSwiftCodeRequest {
    CreateSwiftCodeRequest {
        address: Some("MARSZALKOWSKA 1, WARSZAWA".to_string()),
        bank_name: Some("TEST BANK".to_string()),
        country_iso2: Some("pl".to_string()),
        country_name: Some("Poland".to_string()),
        is_headquarter,
        swift_code: Some(swift_code.to_string()),
    }
}

fn delete_request(bank_name: &str, country_iso2: &str) -> DeleteSwiftCodeRequest {
    DeleteSwiftCodeRequest {
        bank_name: Some(bank_name.to_string()),
        country_iso2: Some(country_iso2.to_string()),
    }
}

// ==========================================
// 查询
// ==========================================

#[tokio::test]
async fn test_get_headquarters_includes_branches() {
    logging::init_test();

    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let repo = create_repo(&db_path);
    create_importer(repo.clone())
        .import_from_file(&fixture("headquarters.xlsx"))
        .await
        .unwrap();
    let api = create_api(repo, HeadquartersPolicy::DeriveFromCode);

    let detail = api.get_swift_code("ABIEBGS1XXX").await.unwrap();
    assert!(detail.record.is_headquarter);
    let branches = detail.branches.as_ref().expect("总行应附带 branches");
    assert_eq!(branches.len(), 1);
    assert_eq!(branches[0].swift_code, "ABIEBGS1001");

    let json = serde_json::to_value(&detail).unwrap();
    assert!(json["branches"].is_array());
    assert_eq!(json["swiftCode"], "ABIEBGS1XXX");
    assert_eq!(json["countryISO2"], "BG");
    assert!(json["branches"][0].get("branches").is_none());
}

#[tokio::test]
async fn test_get_headquarters_without_branches_has_empty_array() {
    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let repo = create_repo(&db_path);
    repo.insert_one(&record("LONEPLPWXXX", "LONE BANK", "PL"))
        .await
        .unwrap();
    let api = create_api(repo, HeadquartersPolicy::DeriveFromCode);

    let detail = api.get_swift_code("LONEPLPWXXX").await.unwrap();
    let json = serde_json::to_value(&detail).unwrap();
    assert_eq!(json["branches"], serde_json::json!([]));
}

#[tokio::test]
async fn test_get_branch_has_no_branches_field() {
    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let repo = create_repo(&db_path);
    create_importer(repo.clone())
        .import_from_file(&fixture("headquarters.xlsx"))
        .await
        .unwrap();
    let api = create_api(repo, HeadquartersPolicy::DeriveFromCode);

    let detail = api.get_swift_code("ABIEBGS1001").await.unwrap();
    assert!(detail.branches.is_none());

    let json = serde_json::to_value(&detail).unwrap();
    assert!(json.get("branches").is_none());
    assert_eq!(json["isHeadquarter"], false);
}

#[tokio::test]
async fn test_get_unknown_code_is_not_found() {
    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let api = create_api(create_repo(&db_path), HeadquartersPolicy::DeriveFromCode);

    let err = api.get_swift_code("NOPEPLPWXXX").await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
}

#[tokio::test]
async fn test_get_by_country() {
    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let repo = create_repo(&db_path);
    create_importer(repo.clone())
        .import_from_file(&fixture("headquarters.xlsx"))
        .await
        .unwrap();
    let api = create_api(repo, HeadquartersPolicy::DeriveFromCode);

    // 查询参数大小写不敏感
    let result = api.get_by_country("bg").await.unwrap();
    assert_eq!(result.country_iso2, "BG");
    assert_eq!(result.country_name, "BULGARIA");
    assert_eq!(result.swift_codes.len(), 2);
    assert_eq!(result.swift_codes[0].swift_code, "ABIEBGS1XXX");
}

#[tokio::test]
async fn test_get_by_country_with_no_records_is_not_found() {
    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let api = create_api(create_repo(&db_path), HeadquartersPolicy::DeriveFromCode);

    let err = api.get_by_country("DE").await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
}

// ==========================================
// 创建
// ==========================================

#[tokio::test]
async fn test_create_upper_cases_country_fields() {
    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let repo = create_repo(&db_path);
    let api = create_api(repo.clone(), HeadquartersPolicy::DeriveFromCode);

    api.create_swift_code(create_request("NEWBPLPWXXX", Some(true)))
        .await
        .unwrap();

    let stored = repo.find_by_code("NEWBPLPWXXX").await.unwrap();
    assert_eq!(stored.country_iso2, "PL");
    assert_eq!(stored.country_name, "POLAND");
    assert_eq!(stored.bank_name, "TEST BANK");
    assert!(stored.is_headquarter);
}

#[tokio::test]
async fn test_create_duplicate_is_conflict() {
    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let api = create_api(create_repo(&db_path), HeadquartersPolicy::DeriveFromCode);

    api.create_swift_code(create_request("DUPLPLPW123", None))
        .await
        .unwrap();
    let err = api
        .create_swift_code(create_request("DUPLPLPW123", None))
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Conflict(_)));
}

#[tokio::test]
async fn test_create_missing_field_is_validation_error() {
    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let repo = create_repo(&db_path);
    let api = create_api(repo.clone(), HeadquartersPolicy::DeriveFromCode);

    let mut request = create_request("MISSPLPW123", None);
    request.bank_name = Some("   ".to_string());

    let err = api.create_swift_code(request).await.unwrap_err();
    assert!(matches!(err, ApiError::ValidationError(_)));
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_create_derive_policy_ignores_caller_flag() {
    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let repo = create_repo(&db_path);
    let api = create_api(repo.clone(), HeadquartersPolicy::DeriveFromCode);

    let created = api
        .create_swift_code(create_request("FLAGPLPW123", Some(true)))
        .await
        .unwrap();
    assert!(!created.is_headquarter);

    let created = api
        .create_swift_code(create_request("FLAGPLPWXXX", Some(false)))
        .await
        .unwrap();
    assert!(created.is_headquarter);
}

#[tokio::test]
async fn test_create_trust_caller_policy_keeps_caller_flag() {
    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let repo = create_repo(&db_path);
    let api = create_api(repo.clone(), HeadquartersPolicy::TrustCaller);

    api.create_swift_code(create_request("TRSTPLPW123", Some(true)))
        .await
        .unwrap();

    let stored = repo.find_by_code("TRSTPLPW123").await.unwrap();
    assert!(stored.is_headquarter);
}

// ==========================================
// 删除
// ==========================================

#[tokio::test]
async fn test_delete_with_wrong_bank_name_keeps_record() {
    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let repo = create_repo(&db_path);
    create_importer(repo.clone())
        .import_from_file(&fixture("basic.xlsx"))
        .await
        .unwrap();
    let api = create_api(repo, HeadquartersPolicy::DeriveFromCode);

    let err = api
        .delete_swift_code("ABCDPLW1", delete_request("Wrong Bank", "PL"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));

    // 记录仍可查询
    assert!(api.get_swift_code("ABCDPLW1").await.is_ok());
}

#[tokio::test]
async fn test_delete_matching_record() {
    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let repo = create_repo(&db_path);
    create_importer(repo.clone())
        .import_from_file(&fixture("basic.xlsx"))
        .await
        .unwrap();
    let api = create_api(repo.clone(), HeadquartersPolicy::DeriveFromCode);

    // 国家代码大小写不敏感
    api.delete_swift_code("ABCDPLW1", delete_request("BankOne", "pl"))
        .await
        .unwrap();

    let err = api.get_swift_code("ABCDPLW1").await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_delete_headquarters_leaves_branches() {
    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let repo = create_repo(&db_path);
    create_importer(repo.clone())
        .import_from_file(&fixture("headquarters.xlsx"))
        .await
        .unwrap();
    let api = create_api(repo, HeadquartersPolicy::DeriveFromCode);

    api.delete_swift_code("ABIEBGS1XXX", delete_request("ABV INVESTMENTS LTD", "BG"))
        .await
        .unwrap();

    let branch = api.get_swift_code("ABIEBGS1001").await.unwrap();
    assert_eq!(branch.record.swift_code, "ABIEBGS1001");
}
