//! Prompt constants and builders for the evaluation call.
//!
//! The system prompt pins the exact JSON shape the upstream model must
//! return; the user prompt renders the form into labelled sections.

use crate::models::form::FormInput;

/// System prompt. The radar dimension list here is the canonical order that
/// `radar::normalize_radar` enforces on the way back in.
pub const EVALUATION_SYSTEM: &str = r#"你是一位资深职业规划师和犀利的互联网嘴替。请根据用户提供的工作详情和个人背景，计算其"工作性价比"。

必须严格以纯 JSON 格式返回，不要包含 markdown 代码块标记（如 ```json），不要包含其他废话。

JSON 数据结构要求如下：
{
  "score": number, // 0-100, 结合各项指标打分
  "tier": string, // 例如：青铜搬砖工, 钻石打工人, 王者合伙人
  "rankTitle": string, // 例如：也就是个混口饭吃, 简直是神仙工作，当然，不只局限于这两个，你可以再细化一下
  "percentile": number, // 0-99, 击败了多少人
  "analysis": string, // 客观理性的评价，400字左右
  "sharpAnalysis": string, // 毒舌、幽默、一针见血的吐槽，像脱口秀演员一样，不要顾及我的面子，使劲骂，狠狠的骂，也要幽默一点
  "pros": string[], // 3-4个核心优势
  "cons": string[], // 3-4个主要劣势
  "radarData": [ // 必须包含以下5个维度的具体数值(0-100)
    { "subject": "薪资待遇", "value": number, "fullMark": 100 },
    { "subject": "工作时长", "value": number, "fullMark": 100 },
    { "subject": "通勤体验", "value": number, "fullMark": 100 },
    { "subject": "城市潜力", "value": number, "fullMark": 100 },
    { "subject": "职业发展", "value": number, "fullMark": 100 }
  ],
  "suggestions": string[] // 3-4条具体建议
}"#;

/// Renders the form into the user message, grouped into profile / job /
/// compensation / workload / drawbacks sections.
pub fn build_user_prompt(input: &FormInput) -> String {
    format!(
        r#"请根据以下信息进行评估：

【个人画像】
- 性别: {gender}
- 年龄: {age} 岁
- 家庭: {family_status}, {spouse_status}
- 学历: {education}
- 工龄: {experience} 年

【工作背景】
- 公司: {company} ({company_type})
- 岗位: {position}
- 城市: {city} ({area_type})

【薪酬待遇】
- 月薪: {salary} 元 ({months}薪)
- 福利: {benefits}
- 年假: {vacation_days} 天/年

【工作强度与环境】
- 工作时间: 每周 {work_days} 天, 每天 {work_hours} 小时
- 通勤(往返): {commute} 分钟
- 压力指数: {stress}/10
- 团队氛围: {environment}

【用户自述槽点/缺点】
- {drawbacks} (请重点参考此项进行扣分和吐槽)"#,
        gender = input.gender,
        age = input.age,
        family_status = input.family_status,
        spouse_status = input.spouse_status,
        education = input.education,
        experience = input.experience,
        company = or_placeholder(&input.company_name, "未填写"),
        company_type = input.company_type,
        position = input.position,
        city = input.city,
        area_type = input.area_type,
        salary = input.salary,
        months = input.months,
        benefits = or_placeholder(&input.benefits, "普通"),
        vacation_days = input.vacation_days,
        work_days = input.work_days_per_week,
        work_hours = input.work_hours_per_day,
        commute = input.commute_time,
        stress = input.stress,
        environment = input.colleague_environment,
        drawbacks = or_placeholder(&input.job_drawbacks, "无"),
    )
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.trim().is_empty() {
        placeholder
    } else {
        value
    }
}
