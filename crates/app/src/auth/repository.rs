//! Auth repository: users and one-time passwords.

use jiff::Timestamp;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};
use uuid::Uuid;

use crate::auth::models::{OtpRecord, ProfileUpdate, Role, User, UserUuid};

const CREATE_USER_SQL: &str = include_str!("sql/create_user.sql");
const FIND_USER_BY_EMAIL_SQL: &str = include_str!("sql/find_user_by_email.sql");
const FIND_USER_BY_UUID_SQL: &str = include_str!("sql/find_user_by_uuid.sql");
const UPDATE_USER_PROFILE_SQL: &str = include_str!("sql/update_user_profile.sql");
const DELETE_USER_SQL: &str = include_str!("sql/delete_user.sql");
const SET_USER_ROLE_SQL: &str = include_str!("sql/set_user_role.sql");
const CREATE_OTP_SQL: &str = include_str!("sql/create_otp.sql");
const FIND_OTP_FOR_UPDATE_SQL: &str = include_str!("sql/find_otp_for_update.sql");
const MARK_OTP_USED_SQL: &str = include_str!("sql/mark_otp_used.sql");

/// New user persistence payload (password already hashed).
#[derive(Debug, Clone)]
pub(crate) struct NewUserRecord {
    pub uuid: UserUuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub name: Option<String>,
    pub phone: Option<String>,
}

/// A user joined with their stored password hash, for login checks.
#[derive(Debug, Clone)]
pub(crate) struct UserWithPassword {
    pub user: User,
    pub password_hash: String,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PgAuthRepository;

impl PgAuthRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_user(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        record: &NewUserRecord,
    ) -> Result<User, sqlx::Error> {
        query_as::<Postgres, User>(CREATE_USER_SQL)
            .bind(record.uuid.into_uuid())
            .bind(&record.username)
            .bind(&record.email)
            .bind(&record.password_hash)
            .bind(record.role.as_str())
            .bind(record.name.as_deref())
            .bind(record.phone.as_deref())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn find_user_by_email(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        email: &str,
    ) -> Result<Option<UserWithPassword>, sqlx::Error> {
        query_as::<Postgres, UserWithPassword>(FIND_USER_BY_EMAIL_SQL)
            .bind(email)
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn find_user_by_uuid(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
    ) -> Result<Option<User>, sqlx::Error> {
        query_as::<Postgres, User>(FIND_USER_BY_UUID_SQL)
            .bind(user.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn update_user_profile(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
        update: &ProfileUpdate,
    ) -> Result<Option<User>, sqlx::Error> {
        query_as::<Postgres, User>(UPDATE_USER_PROFILE_SQL)
            .bind(user.into_uuid())
            .bind(update.name.as_deref())
            .bind(update.phone.as_deref())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn delete_user(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_USER_SQL)
            .bind(user.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn set_user_role(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        email: &str,
        role: Role,
    ) -> Result<Option<User>, sqlx::Error> {
        query_as::<Postgres, User>(SET_USER_ROLE_SQL)
            .bind(email)
            .bind(role.as_str())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn create_otp(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        email: &str,
        code: &str,
        expires_at: Timestamp,
    ) -> Result<(), sqlx::Error> {
        query(CREATE_OTP_SQL)
            .bind(Uuid::now_v7())
            .bind(email)
            .bind(code)
            .bind(SqlxTimestamp::from(expires_at))
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    /// Find the freshest OTP matching `email` + `code`, locking the
    /// row so concurrent verifications serialize.
    pub(crate) async fn find_otp_for_update(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        email: &str,
        code: &str,
    ) -> Result<Option<OtpRecord>, sqlx::Error> {
        query_as::<Postgres, OtpRecord>(FIND_OTP_FOR_UPDATE_SQL)
            .bind(email)
            .bind(code)
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn mark_otp_used(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        otp: Uuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(MARK_OTP_USED_SQL)
            .bind(otp)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

pub(crate) fn user_from_row(row: &PgRow) -> sqlx::Result<User> {
    let role_str: String = row.try_get("role")?;

    let role = role_str
        .parse::<Role>()
        .map_err(|e| sqlx::Error::ColumnDecode {
            index: "role".to_string(),
            source: Box::new(e),
        })?;

    Ok(User {
        uuid: UserUuid::from_uuid(row.try_get("uuid")?),
        username: row.try_get("username")?,
        email: row.try_get("email")?,
        role,
        name: row.try_get("name")?,
        phone: row.try_get("phone")?,
        created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
    })
}

impl<'r> FromRow<'r, PgRow> for User {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        user_from_row(row)
    }
}

impl<'r> FromRow<'r, PgRow> for UserWithPassword {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            user: user_from_row(row)?,
            password_hash: row.try_get("password_hash")?,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for OtpRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: row.try_get("uuid")?,
            email: row.try_get("email")?,
            expires_at: row.try_get::<SqlxTimestamp, _>("expires_at")?.to_jiff(),
            used: row.try_get("used")?,
        })
    }
}
