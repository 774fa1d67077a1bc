//! Prompt assembly for the article wizard.
//!
//! Pure string builders, one per operation. The service targets Persian SEO
//! content, so the instruction text is Persian; the structure (system prompt
//! + task prompt joined by a blank line) is shared by every operation.

fn with_system(system: &str, user: &str) -> String {
    format!("{}\n\n{}", system, user)
}

fn writer_system_prompt(site_subject: &str) -> String {
    format!(
        "تو یک نویسنده حرفه ای مطلب و متخصص SEO فارسی هستی که برای یک وبسایت {} مطالب حرفه ای و SEO شده مینویسی",
        site_subject
    )
}

/// Prompt for proposing an article outline with internal-link suggestions.
pub fn outline(
    topic: &str,
    keywords: &[String],
    target_audience: &str,
    desired_length: u32,
    site_subject: &str,
    site_posts: &[String],
) -> String {
    let user = format!(
        r#"موضوع: {topic}

کلمه کلیدی : {keywords}

هدف مخاطب: {target_audience}

طول تقریبی مقاله: {desired_length} کلمه

وظیفه:

1) یک عنوان اصلی (H1) پیشنهادی بده که شامل کلمه کلیدی باشد.

2) یک OUTLINE دقیق با H2 و H3 بساز. برای هر H2 یک توضیح 1–2 خطی و تعداد کلمه پیشنهادی برای آن بخش بده.

3) مقالاتی که در سایت من موجود هست این موارد هست میخواهم موارد مرتبط رو بین مطلب لینک داخلی ایجاد کنم برای SEO موارد مربوط به هر بخش رو لیست کن  :

{site_posts}

4) خروجی را در قالب JSON بده:

{{
  "title": "",
  "sections": [ {{"h": "", "desc": "", "words": 100}} ],
  "internal_links": ["..."]
}}"#,
        topic = topic,
        keywords = keywords.join(", "),
        target_audience = target_audience,
        desired_length = desired_length,
        site_posts = site_posts.join(", "),
    );

    with_system(&writer_system_prompt(site_subject), &user)
}

/// Prompt for generating one section of the article as Markdown.
#[allow(clippy::too_many_arguments)]
pub fn section_content(
    subject: &str,
    section: &str,
    section_index: u32,
    length: u32,
    keywords: &[String],
    site_subject: &str,
    tone: Option<&str>,
    target_audience: Option<&str>,
    notes: Option<&str>,
    previous_content: Option<&str>,
) -> String {
    let previous_block = previous_content
        .filter(|content| !content.is_empty())
        .map(|content| format!("محتوای بخش‌های قبلی:\n{}\n\n", content))
        .unwrap_or_default();

    // Backticks in free-form notes would break the Markdown-only output rule.
    let notes_block = notes
        .filter(|notes| !notes.is_empty())
        .map(|notes| format!("- نکات اضافی: {}", notes.replace('`', "'")))
        .unwrap_or_default();

    let user = format!(
        r#"موضوع کلی: {subject}

بخش: {section}

این بخش شماره {section_index} از مقاله است.

حداکثر طول: {length}

کلمات کلیدی: {keywords}

لحن: {tone}

مخاطب: {target_audience}

{previous_block}

نکات لازم:

- مطلب chunk شده هست و در حال حاضر در حال تولید یک بخش از مقاله هستیم که بخش  {section_index} ام از مطلب هست

- بخش های مطلب پشت سر هم هستند

- مطلبی برای این بخش با مشخصات داده شده باید تولید شود

- در صورت نیاز برای توضیح بهتر مثال استفاده شود

- از کلمات کلیدی استفاده کن

{notes_block}

خروجی: فقط متن مقاله به فرمت Markdown بدون توضیحات اضافی."#,
        subject = subject,
        section = section,
        section_index = section_index,
        length = length,
        keywords = keywords.join(", "),
        tone = tone.unwrap_or("آموزشی، ساده و رسمی"),
        target_audience = target_audience.unwrap_or("دانش‌آموزان"),
        previous_block = previous_block,
        notes_block = notes_block,
    );

    with_system(&writer_system_prompt(site_subject), &user)
}

/// Prompt for converting Markdown to the constrained WordPress HTML subset.
pub fn convert_markdown(markdown: &str) -> String {
    let system = r#"You are an expert content formatter AI trained to convert Markdown into clean,
WordPress-friendly HTML.

Your output MUST respect these rules:

1. All paragraphs must be wrapped inside:
   <span style="font-size: 14pt;"> ... </span>

2. Bold text => <strong>...</strong>

3. Bullet lists must be converted to:
   <ul><li><span style="font-size: 14pt;">...</span></li></ul>

4. Level-2 and level-3 headings must be converted to spans (NOT <h2> or <h3>):
   Example:
   ## عنوان
   → <span style="font-size: 14pt;"><strong>🔵 عنوان</strong></span>

5. Horizontal lines in Markdown (--- or ***) must be converted to:
   <hr />

6. Tables must be converted to full <table><thead>…</thead><tbody>…</tbody></table>
   with spans inside each cell.

7. No <p>, no <h1-h6> tags allowed.

8. Only clean HTML. No inline CSS except: style="font-size: 14pt;"

9. Preserve Arabic diacritics, RTL structure, and spacing.

You must ALWAYS generate valid HTML ready for WordPress editors like Classic Editor or RankMath."#;

    let user = format!(
        r#"این Markdown را به HTML مخصوص وردپرس تبدیل کن.
فقط خروجی HTML بده، بدون توضیحات اضافه.

[Markdown ورودی من:]

{}"#,
        markdown
    );

    with_system(system, &user)
}

/// Prompt for SEO/readability optimization of an existing text.
pub fn optimize_seo(text: &str, keywords: &[String]) -> String {
    let system = r#"تو یک متخصص سئو، نویسنده وب و بهینه‌ساز حرفه‌ای محتوا هستی. وظیفه تو این است که متن ارائه‌شده توسط کاربر را بدون تغییر در موضوع، ساختار اصلی و پیام کلی آن، از نظر سئو و خوانایی بهینه‌سازی کنی.

قوانین:
1. ساختار کلی متن، تیترها و ترتیب مطالب حفظ شود.
2. متن را روان‌تر، خواناتر و جذاب‌تر کن.
3. از کلمات کلیدی داده‌شده در جای مناسب استفاده کن و چگالی آن‌ها را طبیعی نگه دار.
4. از پرکردن متن غیرضروری و Keyword Stuffing خودداری کن.
5. در صورت نیاز، جمله‌ها را فقط برای بهتر شدن سئو و روانی بازنویسی کن.
6. پاراگراف‌ها را منظم، استاندارد و مناسب وب بنویس.
7. لحن متن را مطابق لحن اصلی حفظ کن.
8. هیچ توضیح اضافه‌ای بیرون از متن نهایی ارائه نده؛ فقط نسخه بهینه‌شده متن را خروجی بده."#;

    let user = format!(
        r#"متن:

{text}

کلمات کلیدی:

{keywords}

لطفاً نسخه بهینه‌شده متن را طبق قوانین فوق و فقط خود متن (بدون توضیحات اضافه) خروجی بده."#,
        text = text,
        keywords = keywords.join(", "),
    );

    with_system(system, &user)
}

/// Prompt for generating SEO metadata for a topic as JSON.
pub fn seo_info(topic: &str) -> String {
    let system = r#"تو یک متخصص سئو حرفه‌ای هستی و وظیفه‌ات تولید خروجی‌های دقیق سئویی بر اساس موضوعی است که کاربر می‌دهد.

قوانین:
1. تمام خروجی باید فقط و فقط در قالب JSON باشد.
2. کلمات کلیدی را در سه دسته ارائه بده: اصلی، فرعی و Long Tail.
3. عنوان مقاله باید جذاب و بین 50 تا 65 کاراکتر باشد.
4. متا دیسکریپشن باید بین 120 تا 155 کاراکتر باشد.
5. چکیده باید 1 الی 2 جمله کوتاه باشد.
6. اگر کاربر درخواست کرد، ساختار مقاله (H1, H2, H3) را هم تولید کن.
7. خارج از JSON هیچ متنی نمایش نده."#;

    let user = format!(
        r#"برای موضوع زیر، خروجی کامل سئویی تولید کن و فقط در قالب JSON برگردان.

موضوع:
{}

ساختار JSON مورد انتظار:

{{
  "title": "",
  "meta_description": "",
  "snippet": "",
  "keywords": {{
    "main": [],
    "secondary": [],
    "long_tail": []
  }},
  "outline": [
    {{
      "h1": "",
      "h2": [],
      "h3": []
    }}
  ]
}}"#,
        topic
    );

    with_system(system, &user)
}

/// Prompt used by the upstream probe: a search-grounded request that fails
/// fast when the key or tunnel is broken.
pub fn upstream_probe() -> String {
    "Search the web and tell me the latest price of Bitcoin.".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outline_prompt_includes_inputs() {
        let keywords = vec!["قهوه".to_string(), "اسپرسو".to_string()];
        let posts = vec!["post-a".to_string(), "post-b".to_string()];
        let prompt = outline("دم کردن قهوه", &keywords, "علاقه‌مندان", 1500, "آشپزی", &posts);

        assert!(prompt.contains("دم کردن قهوه"));
        assert!(prompt.contains("قهوه, اسپرسو"));
        assert!(prompt.contains("post-a, post-b"));
        assert!(prompt.contains("1500 کلمه"));
        assert!(prompt.starts_with("تو یک نویسنده"));
        assert!(prompt.contains("\"internal_links\""));
    }

    #[test]
    fn section_prompt_sanitizes_note_backticks() {
        let prompt = section_content(
            "subject",
            "intro",
            1,
            300,
            &["kw".to_string()],
            "site",
            None,
            None,
            Some("use `code` carefully"),
            None,
        );

        assert!(prompt.contains("use 'code' carefully"));
        assert!(!prompt.contains('`'));
    }

    #[test]
    fn section_prompt_defaults_tone_and_audience() {
        let prompt = section_content(
            "subject", "intro", 2, 300, &[], "site", None, None, None, None,
        );

        assert!(prompt.contains("لحن: آموزشی، ساده و رسمی"));
        assert!(prompt.contains("مخاطب: دانش‌آموزان"));
        assert!(!prompt.contains("محتوای بخش‌های قبلی"));
    }

    #[test]
    fn section_prompt_includes_previous_content_when_present() {
        let prompt = section_content(
            "subject",
            "body",
            3,
            500,
            &[],
            "site",
            Some("رسمی"),
            Some("عمومی"),
            None,
            Some("متن بخش قبل"),
        );

        assert!(prompt.contains("محتوای بخش‌های قبلی:\nمتن بخش قبل"));
        assert!(prompt.contains("لحن: رسمی"));
    }

    #[test]
    fn convert_prompt_embeds_markdown() {
        let prompt = convert_markdown("## سلام");

        assert!(prompt.contains("## سلام"));
        assert!(prompt.contains("WordPress-friendly HTML"));
    }

    #[test]
    fn seo_info_prompt_requests_json_only() {
        let prompt = seo_info("باغبانی");

        assert!(prompt.contains("باغبانی"));
        assert!(prompt.contains("\"long_tail\""));
    }
}
