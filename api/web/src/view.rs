use std::fmt::Write;

use actix_web::http::StatusCode;
use apm_dao::todo::TodoDao;

const STYLE: &str = "body{font-family:sans-serif;max-width:720px;margin:2rem auto}\
table{width:100%;border-collapse:collapse}\
td,th{border:1px solid #ccc;padding:.4rem;text-align:left}\
form{margin-top:1rem}";

fn layout(title: &str, content: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n\
         <h1>{title}</h1>\n{content}</body>\n</html>\n",
        title = escape(title),
    )
}

pub fn index(todos: &[TodoDao]) -> String {
    let mut content = String::new();

    if todos.is_empty() {
        content.push_str("<p>There are no tasks. Create one below!</p>\n");
    } else {
        content.push_str("<table>\n<tr><th>Task</th><th>Added</th><th>Actions</th></tr>\n");
        for todo in todos {
            let _ = writeln!(
                content,
                "<tr><td>{}</td><td>{}</td><td>\
                 <a href=\"/delete/{id}\">Delete</a> <a href=\"/update/{id}\">Update</a>\
                 </td></tr>",
                escape(todo.content().as_deref().unwrap_or("")),
                todo.date_created().format("%Y-%m-%d"),
                id = todo.id(),
            );
        }
        content.push_str("</table>\n");
    }

    content.push_str(
        "<form action=\"/\" method=\"POST\">\n\
         <input type=\"text\" name=\"content\" id=\"content\" maxlength=\"200\">\n\
         <input type=\"submit\" value=\"Add Task\">\n</form>\n",
    );

    layout("Task Master", &content)
}

pub fn update(todo: &TodoDao) -> String {
    let content = format!(
        "<form action=\"/update/{id}\" method=\"POST\">\n\
         <input type=\"text\" name=\"content\" id=\"content\" maxlength=\"200\" value=\"{value}\">\n\
         <input type=\"submit\" value=\"Update\">\n</form>\n\
         <p><a href=\"/\">Back</a></p>\n",
        id = todo.id(),
        value = escape(todo.content().as_deref().unwrap_or("")),
    );

    layout("Update Task", &content)
}

pub fn error(status_code: &StatusCode, message: &str) -> String {
    let content = format!(
        "<p>{}</p>\n<p><a href=\"/\">Back to tasks</a></p>\n",
        escape(message)
    );

    layout(
        &format!(
            "{} {}",
            status_code.as_u16(),
            status_code.canonical_reason().unwrap_or("Error")
        ),
        &content,
    )
}

pub fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_neutralizes_markup() {
        assert_eq!(
            escape(r#"<script>alert("x & 'y'")</script>"#),
            "&lt;script&gt;alert(&quot;x &amp; &#x27;y&#x27;&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape("check pump 3"), "check pump 3");
    }

    #[test]
    fn empty_index_invites_a_first_task() {
        let page = index(&[]);
        assert!(page.contains("There are no tasks"));
        assert!(page.contains("<form action=\"/\" method=\"POST\">"));
    }

    #[test]
    fn update_page_prefills_escaped_content() {
        let todo = TodoDao::new(&Some("a \"quoted\" task".to_owned()));
        let page = update(&todo);
        assert!(page.contains("value=\"a &quot;quoted&quot; task\""));
    }

    #[test]
    fn error_page_names_the_status() {
        let page = error(&StatusCode::NOT_FOUND, "Todo not found");
        assert!(page.contains("<title>404 Not Found</title>"));
        assert!(page.contains("<p>Todo not found</p>"));
    }
}
