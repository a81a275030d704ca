mod chapter;
mod module;
mod notification;
mod topic;
