//! Markup templates of dialogs and forms

pub const DIALOG_NAME: &str = "dialog.html";

pub const DIALOG_TEMPLATE: &str = r#"<div id="{{ dialog.id }}" class="{{ dialog.classes }}" tabindex="-1" role="dialog" aria-hidden="true">
<div class="modal-dialog{% if dialog.size %} {{ dialog.size }}{% endif %}">
<div class="modal-content">
{%- if dialog.title %}
<div class="modal-header">
{%- if dialog.close_button %}<button type="button" class="bootbox-close-button close" aria-hidden="true">&times;</button>{% endif -%}
<h4 class="modal-title">{{ dialog.title }}</h4>
</div>
{%- endif %}
<div class="modal-body">
{%- if dialog.close_button and not dialog.title %}<button type="button" class="bootbox-close-button close" style="margin-top: -2px;" aria-hidden="true">&times;</button>{% endif -%}
<div class="bootbox-body">{% if form %}{{ form }}{% else %}{{ dialog.message | content }}{% endif %}</div>
</div>
{%- if dialog.buttons %}
<div class="modal-footer">
{%- for button in dialog.buttons %}<button data-bb-handler="{{ button.key }}" type="button" class="btn {{ button.class_name }}">{{ button.label }}</button>{% endfor -%}
</div>
{%- endif %}
</div>
</div>
</div>"#;

pub const FORM_NAME: &str = "form.html";

pub const FORM_TEMPLATE: &str = r#"{% macro text_input(input) -%}
{%- if input.input_type == "textarea" -%}
<textarea class="bootbox-input bootbox-input-textarea form-control"{{ input.attributes | attrs }}{% if input.hidden %} style="display: none;"{% endif %}>{{ input.value }}</textarea>
{%- else -%}
<input class="bootbox-input bootbox-input-{{ input.input_type }} form-control" autocomplete="off" type="{{ input.input_type }}" value="{{ input.value }}"{{ input.attributes | attrs }}{% if input.hidden %} style="display: none;"{% endif %} />
{%- endif -%}
{%- endmacro -%}
<form class="bootbox-form" name="{{ form.name }}">
{%- for entry in form.entries %}
{%- if not loop.first %}<br/>{% endif %}
{%- if entry.before %}{{ entry.before | content }}{% endif %}
{%- if form.show_labels and entry.title %}<label class="form-control-label">{{ entry.title }}</label>{% endif %}
{%- set control = entry.control %}
{%- if control.kind == "input" %}{{ text_input(control) }}
{%- elif control.kind == "boolean" %}<input class="bootbox-input bootbox-input-checkbox" type="checkbox"{% if control.checked %} checked{% endif %}{{ control.attributes | attrs }} />
{%- elif control.kind == "select" %}
{%- if control.custom %}<div>{% endif -%}
<select class="bootbox-input bootbox-input-select form-control"{{ control.attributes | attrs }}>
{%- for choice in control.choices %}<option value="{{ choice.value }}"{% if choice.checked %} selected{% endif %}>{{ choice.text }}</option>{% endfor %}
{%- for group in control.groups %}<optgroup label="{{ group.label }}">
{%- for choice in group.choices %}<option value="{{ choice.value }}"{% if choice.checked %} selected{% endif %}>{{ choice.text }}</option>{% endfor -%}
</optgroup>{% endfor -%}
</select>
{%- if control.custom %}<br/>{{ text_input(control.custom.input) }}</div>{% endif %}
{%- elif control.kind in ["checkbox", "radio"] %}<div{{ control.attributes | attrs }}>
{%- for choice in control.choices %}<div class="{{ control.kind }}"><label><input class="bootbox-input bootbox-input-{{ control.kind }}" type="{{ control.kind }}" value="{{ choice.value }}"{% if control.name %} name="{{ control.name }}"{% endif %}{% if choice.checked %} checked{% endif %} />{{ choice.text }}</label></div>{% endfor -%}
</div>
{%- endif %}
{%- if entry.validation %}<div class="help-block with-errors">{% if entry.validation.message %}{{ entry.validation.message }}{% endif %}</div>{% endif %}
{%- if entry.after %}{{ entry.after | content }}{% endif %}
{%- endfor %}
</form>"#;
