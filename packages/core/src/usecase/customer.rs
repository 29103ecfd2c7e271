//! UseCase: 顧客ストア
//!
//! 顧客コレクションに対する作成・削除・参照・部分更新を提供します。
//! 各操作はコレクション全体を読み込み、変更があれば全体を保存します。
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - CustomerStore の CRUD 操作
//!
//! ### どのような状況を想定しているか
//! - 正常系：作成・参照・更新・削除
//! - 異常系：重複 ID での作成、存在しない ID への操作（保存されないこと）

use std::sync::Arc;

use crate::domain::{
    Customer, CustomerCollection, CustomerId, CustomerPatch, CustomerRepository, RepositoryError,
};

use super::error::CustomerStoreError;

/// 顧客ストア
#[derive(Clone)]
pub struct CustomerStore {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn CustomerRepository>,
}

impl CustomerStore {
    /// 新しい CustomerStore を作成
    pub fn new(repository: Arc<dyn CustomerRepository>) -> Self {
        Self { repository }
    }

    /// Load the whole customer collection
    pub fn load(&self) -> Result<CustomerCollection, RepositoryError> {
        self.repository.load()
    }

    /// Persist the whole customer collection
    pub fn save(&self, customers: &CustomerCollection) -> Result<(), RepositoryError> {
        self.repository.save(customers)
    }

    /// Register a new customer
    ///
    /// # Errors
    ///
    /// * `CustomerStoreError::AlreadyExists` - the id is taken; nothing is saved
    pub fn create(
        &self,
        id: CustomerId,
        name: String,
        email: String,
    ) -> Result<Customer, CustomerStoreError> {
        let mut customers = self.load()?;
        if customers.contains_key(&id) {
            tracing::warn!("Customer '{}' already exists", id);
            return Err(CustomerStoreError::AlreadyExists(id));
        }

        let customer = Customer::new(id.clone(), name, email);
        customers.insert(id, customer.clone());
        self.save(&customers)?;

        tracing::info!("Created customer '{}'", customer.id);
        Ok(customer)
    }

    /// Remove a customer, returning the removed record
    pub fn delete(&self, id: &CustomerId) -> Result<Customer, CustomerStoreError> {
        let mut customers = self.load()?;
        let Some(customer) = customers.remove(id) else {
            tracing::warn!("Customer '{}' not found", id);
            return Err(CustomerStoreError::NotFound(id.clone()));
        };
        self.save(&customers)?;

        tracing::info!("Deleted customer '{}'", id);
        Ok(customer)
    }

    /// Snapshot of one customer
    pub fn get(&self, id: &CustomerId) -> Result<Customer, CustomerStoreError> {
        self.load()?.remove(id).ok_or_else(|| {
            tracing::warn!("Customer '{}' not found", id);
            CustomerStoreError::NotFound(id.clone())
        })
    }

    /// Formatted snapshot of one customer
    pub fn get_info(&self, id: &CustomerId) -> Result<String, CustomerStoreError> {
        self.get(id).map(|customer| customer.to_string())
    }

    /// Whether a customer with `id` is registered
    pub fn exists(&self, id: &CustomerId) -> Result<bool, RepositoryError> {
        Ok(self.load()?.contains_key(id))
    }

    /// Apply a partial update; fields absent from `patch` keep their values
    ///
    /// An empty patch returns the current record without saving.
    pub fn modify(
        &self,
        id: &CustomerId,
        patch: CustomerPatch,
    ) -> Result<Customer, CustomerStoreError> {
        let mut customers = self.load()?;
        let Some(customer) = customers.get_mut(id) else {
            tracing::warn!("Customer '{}' not found", id);
            return Err(CustomerStoreError::NotFound(id.clone()));
        };
        if patch.is_empty() {
            tracing::debug!("Nothing to change for customer '{}'", id);
            return Ok(customer.clone());
        }
        customer.apply_patch(patch);
        let updated = customer.clone();
        self.save(&customers)?;

        tracing::info!("Modified customer '{}'", id);
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::repository::MockCustomerRepository,
        infrastructure::repository::{
            JsonCustomerRepository, json::test_support::ScratchDir,
        },
    };

    fn customer_id(id: &str) -> CustomerId {
        CustomerId::new(id.to_string()).unwrap()
    }

    fn create_test_store(dir: &ScratchDir) -> CustomerStore {
        CustomerStore::new(Arc::new(JsonCustomerRepository::new(
            dir.file("customers.json"),
        )))
    }

    #[test]
    fn test_create_customer_success() {
        // テスト項目: 新しい顧客を作成すると保存される
        // given (前提条件):
        let dir = ScratchDir::new();
        let store = create_test_store(&dir);

        // when (操作):
        let result = store.create(
            customer_id("C001"),
            "Ana".to_string(),
            "ana@example.com".to_string(),
        );

        // then (期待する結果):
        assert!(result.is_ok());
        let customer = store.get(&customer_id("C001")).unwrap();
        assert_eq!(customer.name, "Ana");
        assert_eq!(customer.email, "ana@example.com");
    }

    #[test]
    fn test_create_duplicate_customer_keeps_existing_record() {
        // テスト項目: 重複した ID での作成は失敗し、既存の顧客は変わらない
        // given (前提条件):
        let dir = ScratchDir::new();
        let store = create_test_store(&dir);
        store
            .create(
                customer_id("C001"),
                "Ana".to_string(),
                "ana@example.com".to_string(),
            )
            .unwrap();

        // when (操作):
        let result = store.create(
            customer_id("C001"),
            "Impostor".to_string(),
            "x@example.com".to_string(),
        );

        // then (期待する結果):
        assert!(matches!(result, Err(CustomerStoreError::AlreadyExists(_))));
        assert_eq!(store.get(&customer_id("C001")).unwrap().name, "Ana");
    }

    #[test]
    fn test_create_duplicate_customer_does_not_save() {
        // テスト項目: 重複 ID の場合は保存処理が呼ばれない
        // given (前提条件):
        let mut repository = MockCustomerRepository::new();
        repository.expect_load().returning(|| {
            let mut customers = CustomerCollection::new();
            let id = CustomerId::new("C001".to_string()).unwrap();
            customers.insert(
                id.clone(),
                Customer::new(id, "Ana".to_string(), "ana@example.com".to_string()),
            );
            Ok(customers)
        });
        repository.expect_save().never();
        let store = CustomerStore::new(Arc::new(repository));

        // when (操作):
        let result = store.create(
            customer_id("C001"),
            "Ana".to_string(),
            "ana@example.com".to_string(),
        );

        // then (期待する結果):
        assert!(matches!(result, Err(CustomerStoreError::AlreadyExists(_))));
    }

    #[test]
    fn test_delete_missing_customer_fails_without_saving() {
        // テスト項目: 存在しない顧客の削除は失敗し、保存されない
        // given (前提条件):
        let mut repository = MockCustomerRepository::new();
        repository
            .expect_load()
            .returning(|| Ok(CustomerCollection::new()));
        repository.expect_save().never();
        let store = CustomerStore::new(Arc::new(repository));

        // when (操作):
        let result = store.delete(&customer_id("C404"));

        // then (期待する結果):
        assert!(matches!(result, Err(CustomerStoreError::NotFound(id)) if id.as_str() == "C404"));
    }

    #[test]
    fn test_delete_customer_success() {
        // テスト項目: 顧客を削除すると参照できなくなる
        // given (前提条件):
        let dir = ScratchDir::new();
        let store = create_test_store(&dir);
        store
            .create(
                customer_id("C001"),
                "Ana".to_string(),
                "ana@example.com".to_string(),
            )
            .unwrap();

        // when (操作):
        let result = store.delete(&customer_id("C001"));

        // then (期待する結果):
        assert!(result.is_ok());
        assert!(!store.exists(&customer_id("C001")).unwrap());
    }

    #[test]
    fn test_get_info_missing_customer_fails() {
        // テスト項目: 存在しない顧客の情報は取得できない
        // given (前提条件):
        let dir = ScratchDir::new();
        let store = create_test_store(&dir);

        // when (操作):
        let result = store.get_info(&customer_id("C404"));

        // then (期待する結果):
        assert!(matches!(result, Err(CustomerStoreError::NotFound(_))));
    }

    #[test]
    fn test_get_info_formats_customer() {
        // テスト項目: 顧客情報を整形された文字列で取得できる
        // given (前提条件):
        let dir = ScratchDir::new();
        let store = create_test_store(&dir);
        store
            .create(
                customer_id("C001"),
                "Ana".to_string(),
                "ana@example.com".to_string(),
            )
            .unwrap();

        // when (操作):
        let info = store.get_info(&customer_id("C001")).unwrap();

        // then (期待する結果):
        assert_eq!(
            info,
            "Customer ID: C001\nName: Ana\nEmail: ana@example.com\n"
        );
    }

    #[test]
    fn test_modify_customer_partial_update() {
        // テスト項目: 名前だけを更新した場合、メールは変わらない
        // given (前提条件):
        let dir = ScratchDir::new();
        let store = create_test_store(&dir);
        store
            .create(
                customer_id("C001"),
                "Ana".to_string(),
                "ana@example.com".to_string(),
            )
            .unwrap();

        // when (操作):
        let result = store.modify(
            &customer_id("C001"),
            CustomerPatch {
                name: Some("Ana María".to_string()),
                email: None,
            },
        );

        // then (期待する結果):
        assert!(result.is_ok());
        let customer = store.get(&customer_id("C001")).unwrap();
        assert_eq!(customer.name, "Ana María");
        assert_eq!(customer.email, "ana@example.com");
    }

    #[test]
    fn test_modify_missing_customer_fails() {
        // テスト項目: 存在しない顧客の更新は失敗する
        // given (前提条件):
        let dir = ScratchDir::new();
        let store = create_test_store(&dir);

        // when (操作):
        let result = store.modify(&customer_id("C404"), CustomerPatch::default());

        // then (期待する結果):
        assert!(matches!(result, Err(CustomerStoreError::NotFound(_))));
    }

    #[test]
    fn test_modify_customer_with_empty_patch_does_not_save() {
        // テスト項目: 変更内容が空の場合は保存されず、現在の顧客がそのまま返る
        // given (前提条件):
        let mut repository = MockCustomerRepository::new();
        repository.expect_load().returning(|| {
            let mut customers = CustomerCollection::new();
            let id = CustomerId::new("C001".to_string()).unwrap();
            customers.insert(
                id.clone(),
                Customer::new(id, "Ana".to_string(), "ana@example.com".to_string()),
            );
            Ok(customers)
        });
        repository.expect_save().never();
        let store = CustomerStore::new(Arc::new(repository));

        // when (操作):
        let result = store.modify(&customer_id("C001"), CustomerPatch::default());

        // then (期待する結果):
        assert_eq!(result.unwrap().name, "Ana");
    }
}
