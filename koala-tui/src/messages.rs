//! User-facing notification texts.
//!
//! Failures only ever surface these generic messages; the error detail goes to
//! the log.

pub const LOAD_FAILED: &str = "加载失败";
pub const DOMAIN_LIST_LOAD_FAILED: &str = "加载领域列表失败";
pub const CREATE_FAILED: &str = "创建失败";
pub const ADD_FAILED: &str = "添加失败";
pub const UPDATE_FAILED: &str = "更新失败";
pub const DELETE_FAILED: &str = "删除失败";
pub const SYNC_FAILED: &str = "同步失败";
pub const GENERATE_FAILED: &str = "生成失败";

pub const CREATED: &str = "创建成功";
pub const ADDED: &str = "添加成功";
pub const UPDATED: &str = "更新成功";
pub const DELETED: &str = "删除成功";
pub const SYNC_TRIGGERED: &str = "同步已触发";
pub const FORCE_SYNC_TRIGGERED: &str = "强制同步已触发";
pub const DOMAIN_DOC_GENERATED: &str = "领域文档生成成功";
pub const SERVICE_DOC_GENERATED: &str = "服务文档生成成功";

pub const ADDRESS_REQUIRED: &str = "请输入仓库地址";
pub const REQUIRED_FIELDS: &str = "请填写必填项";
pub const DOMAIN_NAME_REQUIRED: &str = "请输入领域名称";
pub const NAME_AND_CODE_REQUIRED: &str = "请填写名称和代码";
pub const NO_WAREHOUSES: &str = "暂无可选仓库";

pub const CONFIRM_DELETE_WAREHOUSE: &str = "确定删除该仓库吗？";
pub const CONFIRM_DELETE_DOMAIN: &str = "确定删除该领域吗？";
pub const CONFIRM_DELETE_SERVICE: &str = "确定删除该服务吗？";

pub const DEFAULT_BRANCH: &str = "master";

pub fn domain_doc_title(domain_name: &str) -> String {
    format!("{} - 领域文档", domain_name)
}

pub fn service_doc_title(service_name: &str) -> String {
    format!("{} - 服务文档", service_name)
}
