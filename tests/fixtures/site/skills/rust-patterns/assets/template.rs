template
