use policyload::error::AppResult;

fn main() -> AppResult<()> {
    policyload::run()
}
