/// 项目创建表单流程演示
///
/// 此示例演示完整的提交流程，包括：
/// 1. 空输入被本地拦截（不发起网络请求）
/// 2. 提交新项目（POST /Project/AddProject/{boardId}）
/// 3. 重复标题被本地缓存拦截（不发起网络请求）
///
/// 运行方式：
/// ```bash
/// API_BASE_URL=http://localhost:8000 cargo run --example create_project_demo
/// ```
use std::sync::Arc;

use rust_client::AppState;
use rust_client::config::Config;
use rust_client::form::{FormState, SubmissionOutcome};
use rust_client::notify::{ConsoleNotifier, Notifier};
use rust_client::services::{ProjectsService, SubmitContext};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== 项目创建表单流程演示 ===\n");

    let config = Config::from_env()?;
    let notifier: Arc<dyn Notifier> = Arc::new(ConsoleNotifier::without_acknowledge());
    let app = AppState::new(config, notifier);

    let ctx = SubmitContext {
        board_id: 42,
        success_toast: app.config.success_toast(),
    };
    let mut form = FormState::new();

    println!("目标端点: {}\n", app.client.add_project_url(ctx.board_id));

    // 步骤 1: 空输入
    println!("1. 提交空表单...");
    let outcome = ProjectsService::submit(&mut form, &ctx, &app.client, app.notifier.as_ref()).await;
    match outcome {
        SubmissionOutcome::RejectedEmpty { .. } => {
            println!("✅ 空输入在本地被拦截，未发起网络请求\n");
        }
        other => println!("⚠️  意外结果: {:?}\n", other),
    }

    // 步骤 2: 提交新项目
    println!("2. 提交新项目 \"Sprint Plan\"...");
    form.title_changed("Sprint Plan");
    form.description_changed("Q1 roadmap");
    let outcome = ProjectsService::submit(&mut form, &ctx, &app.client, app.notifier.as_ref()).await;
    match outcome {
        SubmissionOutcome::Created => {
            println!("✅ 创建成功，本地缓存现有 {} 个项目", form.existing_projects().len());
            println!("   输入框已清空: title={:?} description={:?}\n", form.title(), form.description());
        }
        SubmissionOutcome::ServerRejected { status } => {
            println!("❌ 服务端拒绝: {}（表单内容已保留）\n", status);
        }
        SubmissionOutcome::NetworkFailed { .. } => {
            println!("❌ 网络错误（请确保服务器正在运行）\n");
        }
        other => println!("⚠️  意外结果: {:?}\n", other),
    }

    // 步骤 3: 重复标题
    println!("3. 以相同标题再次提交...");
    form.title_changed("Sprint Plan");
    form.description_changed("different description");
    let outcome = ProjectsService::submit(&mut form, &ctx, &app.client, app.notifier.as_ref()).await;
    match outcome {
        SubmissionOutcome::RejectedDuplicate { .. } => {
            println!("✅ 重复标题在本地被拦截，未发起网络请求\n");
        }
        other => println!("⚠️  结果: {:?}（首次创建未成功时缓存为空，不构成重复）\n", other),
    }

    println!("=== 演示完成 ===");
    Ok(())
}
