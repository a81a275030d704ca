pub use super::chapter::Entity as Chapter;
pub use super::module::Entity as Module;
pub use super::notification::Entity as Notification;
pub use super::study_group::Entity as StudyGroup;
pub use super::study_group_member::Entity as StudyGroupMember;
pub use super::topic::Entity as Topic;
pub use super::user::Entity as User;
pub use super::user_module::Entity as UserModule;
pub use super::user_session::Entity as UserSession;
